pub mod input_box;
pub mod message;
pub mod message_list;
pub mod shortcuts;
pub mod title_bar;
pub mod welcome;

pub use input_box::{InputBox, InputEvent};
pub use message_list::{MessageList, MessageListState};
pub use shortcuts::ShortcutsOverlay;
pub use title_bar::TitleBar;
pub use welcome::Welcome;
