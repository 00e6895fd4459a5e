mod choice;
mod console;
mod message;
mod store;
mod user;

pub use choice::Choice;
pub use console::Console;
pub use message::Message;
pub use store::{StoreError, UserStore};
pub use user::User;
