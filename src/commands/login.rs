use crate::db::users::{Authenticator, Users};
use crate::libs::{messages::Message, session::Session};
use crate::{msg_error, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};

pub fn cmd() -> Result<()> {
    let username: String = Input::with_theme(&ColorfulTheme::default()).with_prompt("Username").interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default()).with_prompt("Password").interact()?;

    let mut users = Users::new()?;
    if users.authenticate(&username, &password)? {
        Session::start(&username)?;
        msg_success!(Message::LoginSuccess(username));
    } else {
        msg_error!(Message::InvalidCredentials);
    }
    Ok(())
}
