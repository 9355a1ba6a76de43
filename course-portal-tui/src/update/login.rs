//! 登录表单更新

use crate::message::LoginMessage;
use crate::model::state::LoginField;
use crate::model::App;

pub fn update(app: &mut App, msg: LoginMessage) {
    let login = &mut app.login;
    if login.submitting {
        return;
    }

    match msg {
        LoginMessage::Input(' ') if login.field == LoginField::Remember => {
            login.remember = !login.remember;
        }
        LoginMessage::Input(c) => {
            if let Some(input) = login.current_input() {
                input.push(c);
            }
        }
        LoginMessage::Backspace => {
            if let Some(input) = login.current_input() {
                input.pop();
            }
        }
        LoginMessage::NextField => login.field = login.field.next(),
        LoginMessage::PrevField => login.field = login.field.prev(),
        LoginMessage::Submit => {
            if !login.is_complete() {
                return;
            }
            login.submitting = true;
            let (username, password, remember) =
                (login.username.clone(), login.password.clone(), login.remember);
            app.tasks.login(username, password, remember);
        }
    }
}
