//! 页面数据状态

mod dashboard;
mod login;
mod modal;
mod settings;

pub use dashboard::DashboardState;
pub use login::{LoginField, LoginState};
pub use modal::{Modal, ModalState};
pub use settings::{SettingItem, SettingsState};
