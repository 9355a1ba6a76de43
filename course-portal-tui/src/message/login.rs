/// 登录表单消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMessage {
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 提交登录
    Submit,
}
