pub type Username = String;
pub type Password = String;

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub username: Username,
    pub email: String,
    pub password: Password,
}
