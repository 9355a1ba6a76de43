//! 登录页状态

use course_portal_core::types::RememberedCredentials;

/// 登录表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    Remember,
}

impl LoginField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Remember,
            LoginField::Remember => LoginField::Username,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            LoginField::Username => LoginField::Remember,
            LoginField::Password => LoginField::Username,
            LoginField::Remember => LoginField::Password,
        }
    }
}

/// 登录页状态
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub remember: bool,
    pub field: LoginField,
    /// 登录请求进行中
    pub submitting: bool,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用记住的凭证预填表单
    pub fn from_remembered(remembered: Option<RememberedCredentials>) -> Self {
        match remembered {
            Some(credentials) => Self {
                username: credentials.username,
                password: credentials.password,
                remember: true,
                ..Self::default()
            },
            None => Self::new(),
        }
    }

    /// 当前字段对应的输入缓冲区
    pub fn current_input(&mut self) -> Option<&mut String> {
        match self.field {
            LoginField::Username => Some(&mut self.username),
            LoginField::Password => Some(&mut self.password),
            LoginField::Remember => None,
        }
    }

    /// 是否可以提交
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}
