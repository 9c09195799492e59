use crate::domain::model::Book;
use crate::domain::ports::Serializable;
use crate::utils::error::{DispatchError, Result};
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeJson;

impl Serializable for SerializeJson {
    fn serializer_type(&self, book: &Book) -> Result<String> {
        Ok(serde_json::to_string(book)?)
    }
}

/// `<book><title>..</title><content>..</content></book>`, no XML declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeXml;

impl Serializable for SerializeXml {
    fn serializer_type(&self, book: &Book) -> Result<String> {
        let mut writer = Writer::new(Vec::new());

        write_event(&mut writer, Event::Start(BytesStart::new("book")))?;
        write_text_element(&mut writer, "title", &book.title)?;
        write_text_element(&mut writer, "content", &book.content)?;
        write_event(&mut writer, Event::End(BytesEnd::new("book")))?;

        String::from_utf8(writer.into_inner()).map_err(|e| DispatchError::XmlError {
            message: e.to_string(),
        })
    }
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        return write_event(writer, Event::Empty(BytesStart::new(name)));
    }
    write_event(writer, Event::Start(BytesStart::new(name)))?;
    // Only &, < and > need escaping inside element text.
    write_event(writer, Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    write_event(writer, Event::End(BytesEnd::new(name)))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| DispatchError::XmlError {
            message: e.to_string(),
        })
}
