//! 日志行模板，占位符与旧日志配置一致：
//! `%datetime%`、`%channel%`、`%level_name%`、`%message%`、`%context%`、`%extra%`。

/// 默认行模板
pub const DEFAULT_LINE_TEMPLATE: &str = "[%datetime%] %level_name% : %message%\n";

/// `%channel%` 的值
pub const LOG_CHANNEL: &str = "IESO";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Datetime,
    Channel,
    LevelName,
    Message,
    /// 没有对应的数据，渲染为空
    Context,
    /// 同上
    Extra,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "datetime" => Some(Placeholder::Datetime),
            "channel" => Some(Placeholder::Channel),
            "level_name" => Some(Placeholder::LevelName),
            "message" => Some(Placeholder::Message),
            "context" => Some(Placeholder::Context),
            "extra" => Some(Placeholder::Extra),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(Placeholder),
}

/// 解析后的行模板。渲染结果总以换行结束。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTemplate {
    segments: Vec<Segment>,
}

impl LineTemplate {
    /// 解析模板；不认识的 `%xxx%` 原样保留。
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(start) = rest.find('%') {
            literal.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let field = after
                .find('%')
                .and_then(|end| Placeholder::from_name(&after[..end]).map(|p| (p, end)));

            match field {
                Some((placeholder, end)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(placeholder));
                    rest = &after[end + 1..];
                }
                None => {
                    literal.push('%');
                    rest = after;
                }
            }
        }

        literal.push_str(rest);
        if !literal.ends_with('\n') {
            literal.push('\n');
        }
        segments.push(Segment::Literal(literal));

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl Default for LineTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_LINE_TEMPLATE)
    }
}
