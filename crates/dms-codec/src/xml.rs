//! Structured-document encoding and tolerant decoding.

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use dms_model::{DataModule, DmType, Dmc, InfoVariant};

use crate::CodecError;

/// The identification fields carried by the structured wrapper.
#[derive(Debug, Clone, Copy)]
pub struct ModuleIdentity<'a> {
    pub dmc: &'a Dmc,
    pub title: &'a str,
    pub dm_type: DmType,
    pub info_variant: InfoVariant,
}

impl<'a> From<&'a DataModule> for ModuleIdentity<'a> {
    fn from(module: &'a DataModule) -> Self {
        Self {
            dmc: &module.dmc,
            title: &module.title,
            dm_type: module.dm_type,
            info_variant: module.info_variant,
        }
    }
}

/// Encode a module identity and its plain-text content as a structured
/// document.
///
/// `None` identity yields the empty string (no module selected). Otherwise
/// the output is a `<dataModule>` wrapper with an identification block and a
/// content block whose payload is a single CDATA section holding `text`
/// verbatim, so markup-reserved characters survive unmodified.
///
/// Text containing the CDATA closing delimiter `]]>` is emitted verbatim and
/// terminates the literal section early; such text does not round-trip
/// through [`decode`]. This is deliberate and not repaired.
pub fn encode(identity: Option<&ModuleIdentity<'_>>, text: &str) -> Result<String, CodecError> {
    let Some(identity) = identity else {
        return Ok(String::new());
    };

    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    xml.write_event(Event::Start(BytesStart::new("dataModule")))?;
    xml.write_event(Event::Start(BytesStart::new("identification")))?;
    write_text_element(&mut xml, "dmc", identity.dmc.as_str())?;
    write_text_element(&mut xml, "title", identity.title)?;
    write_text_element(&mut xml, "dmType", identity.dm_type.as_str())?;
    write_text_element(&mut xml, "infoVariant", identity.info_variant.code())?;
    xml.write_event(Event::End(BytesEnd::new("identification")))?;

    xml.write_event(Event::Start(BytesStart::new("content")))?;
    xml.write_event(Event::CData(BytesCData::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new("content")))?;
    xml.write_event(Event::End(BytesEnd::new("dataModule")))?;

    Ok(String::from_utf8(xml.into_inner())?)
}

fn write_text_element<W: std::io::Write>(
    xml: &mut Writer<W>,
    name: &str,
    value: &str,
) -> std::io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Extract the literal-section payload from a structured document.
///
/// Returns the first CDATA payload found inside a `<content>` element.
/// Malformed markup, a missing literal section, or a non-UTF-8 payload all
/// degrade to the empty string; the editor must stay usable on hand-edited,
/// transiently invalid input, so this function never fails.
pub fn decode(structured: &str) -> String {
    let mut reader = Reader::from_str(structured);
    let mut content_depth = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) if start.name().as_ref() == b"content" => {
                content_depth += 1;
            }
            Ok(Event::End(end)) if end.name().as_ref() == b"content" => {
                content_depth = content_depth.saturating_sub(1);
            }
            Ok(Event::CData(cdata)) if content_depth > 0 => {
                return String::from_utf8_lossy(&cdata.into_inner()).into_owned();
            }
            Ok(Event::Eof) | Err(_) => return String::new(),
            Ok(_) => {}
        }
    }
}
