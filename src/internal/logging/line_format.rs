//! 日志行格式：按 [`LineTemplate`] 渲染，默认为 `[<时间>] <级别> : <消息>`

use std::fmt;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::line_template::{LOG_CHANNEL, LineTemplate, Placeholder, Segment};

#[derive(Debug, Clone)]
pub struct LineFormat {
    /// strftime 格式，用于 `%datetime%`
    datetime_format: String,
    template: LineTemplate,
}

impl LineFormat {
    pub fn new(datetime_format: impl Into<String>, template: LineTemplate) -> Self {
        Self {
            datetime_format: datetime_format.into(),
            template,
        }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        for segment in self.template.segments() {
            match segment {
                Segment::Literal(text) => writer.write_str(text)?,
                Segment::Field(Placeholder::Datetime) => {
                    write!(writer, "{}", Local::now().format(&self.datetime_format))?
                }
                Segment::Field(Placeholder::Channel) => writer.write_str(LOG_CHANNEL)?,
                Segment::Field(Placeholder::LevelName) => {
                    write!(writer, "{}", event.metadata().level())?
                }
                Segment::Field(Placeholder::Message) => {
                    ctx.field_format().format_fields(writer.by_ref(), event)?
                }
                Segment::Field(Placeholder::Context | Placeholder::Extra) => {}
            }
        }
        Ok(())
    }
}
