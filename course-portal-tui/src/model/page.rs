/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 登录页
    #[default]
    Login,
    /// 课程页（课程 / 单元 / 课时三栏）
    Dashboard,
    /// 设置
    Settings,
}

impl Page {
    /// 是否已登录后的页面
    pub fn is_authenticated(self) -> bool {
        !matches!(self, Page::Login)
    }
}
