use std::fmt::{Display, Formatter};

use strum::EnumMessage;
use strum_macros::EnumMessage;

/// Every text the console shows to the person at the keyboard.
#[derive(EnumMessage, Debug, PartialEq)]
pub enum Message {
    #[strum(message = "Выберите действие (1 - авторизация, 2 - регистрация): ")]
    MenuPrompt,
    #[strum(message = "Введите логин: ")]
    UsernamePrompt,
    #[strum(message = "Введите электронную почту: ")]
    EmailPrompt,
    #[strum(message = "Введите пароль: ")]
    PasswordPrompt,

    #[strum(message = "Авторизация успешна!")]
    AuthSuccess,
    #[strum(message = "Неверный логин или пароль.")]
    AuthFailure,
    #[strum(message = "Неверный ввод.")]
    InvalidInput,

    #[strum(message = "Логин: {}, Электронная почта: {}")]
    UserEntry(String, String),
}

impl Message {
    /// Prompts are printed without a trailing newline so the answer is typed
    /// on the same line.
    pub fn is_prompt(&self) -> bool {
        use Message::*;
        matches!(
            self,
            MenuPrompt | UsernamePrompt | EmailPrompt | PasswordPrompt
        )
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = self.get_message().unwrap_or_default();
        match self {
            Message::UserEntry(username, email) => {
                let (head, rest) = text.split_once("{}").unwrap_or((text, ""));
                let (middle, tail) = rest.split_once("{}").unwrap_or((rest, ""));
                write!(f, "{}{}{}{}{}", head, username, middle, email, tail)
            }
            _ => write!(f, "{}", text),
        }
    }
}
