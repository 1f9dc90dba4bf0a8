//! SOAP 1.1 envelopes for the number conversion service.

use std::io::Cursor;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesDecl, BytesEnd, BytesRef, BytesStart, BytesText, Event};

use crate::error::HarnessError;

pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const NUMBER_CONVERSION_NS: &str = "http://www.dataaccess.com/webservicesserver/";

/// The `NumberToWords` operation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberToWords {
    pub ubi_num: u64,
}

impl NumberToWords {
    pub fn new(ubi_num: u64) -> Self {
        Self { ubi_num }
    }

    /// Renders the full request envelope.
    pub fn to_envelope(&self) -> Result<String, HarnessError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(xml_error)?;

        let mut envelope = BytesStart::new("soap:Envelope");
        envelope.push_attribute(("xmlns:soap", SOAP_ENVELOPE_NS));
        writer
            .write_event(Event::Start(envelope))
            .map_err(xml_error)?;
        writer
            .write_event(Event::Start(BytesStart::new("soap:Body")))
            .map_err(xml_error)?;

        let mut operation = BytesStart::new("NumberToWords");
        operation.push_attribute(("xmlns", NUMBER_CONVERSION_NS));
        writer
            .write_event(Event::Start(operation))
            .map_err(xml_error)?;

        let number = self.ubi_num.to_string();
        writer
            .write_event(Event::Start(BytesStart::new("ubiNum")))
            .map_err(xml_error)?;
        writer
            .write_event(Event::Text(BytesText::new(&number)))
            .map_err(xml_error)?;
        writer
            .write_event(Event::End(BytesEnd::new("ubiNum")))
            .map_err(xml_error)?;

        for name in ["NumberToWords", "soap:Body", "soap:Envelope"] {
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(xml_error)?;
        }

        String::from_utf8(writer.into_inner().into_inner()).map_err(xml_error)
    }
}

/// Returns the trimmed text of the first element whose local name is
/// `element`, ignoring namespace prefixes. Entity and character references
/// are resolved.
pub fn element_text(xml: &str, element: &str) -> Result<Option<String>, HarnessError> {
    let mut reader = Reader::from_str(xml);

    let mut inside = false;
    let mut text = String::new();
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) if e.local_name().as_ref() == element.as_bytes() => {
                inside = true;
            }
            Event::Empty(e) if e.local_name().as_ref() == element.as_bytes() => {
                return Ok(Some(String::new()));
            }
            Event::Text(t) if inside => {
                text.push_str(&t.decode().map_err(xml_error)?);
            }
            Event::CData(c) if inside => {
                text.push_str(&c.decode().map_err(xml_error)?);
            }
            Event::GeneralRef(r) if inside => {
                text.push_str(&resolve_reference(&r)?);
            }
            Event::End(e) if inside && e.local_name().as_ref() == element.as_bytes() => {
                return Ok(Some(text.trim().to_string()));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Extracts `NumberToWordsResult` from a response envelope. A SOAP fault is
/// reported with its `faultstring`.
pub fn number_to_words_result(xml: &str) -> Result<String, HarnessError> {
    if let Some(fault) = element_text(xml, "faultstring")? {
        return Err(HarnessError::Xml(format!("SOAP fault: {fault}")));
    }
    element_text(xml, "NumberToWordsResult")?
        .ok_or_else(|| HarnessError::Xml("response has no NumberToWordsResult".to_string()))
}

fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, HarnessError> {
    if let Some(ch) = reference.resolve_char_ref().map_err(xml_error)? {
        return Ok(ch.to_string());
    }
    let name = reference.decode().map_err(xml_error)?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| HarnessError::Xml(format!("unknown entity &{name};")))
}

fn xml_error(err: impl std::fmt::Display) -> HarnessError {
    HarnessError::Xml(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <m:NumberToWordsResponse xmlns:m="http://www.dataaccess.com/webservicesserver/">
      <m:NumberToWordsResult>five hundred </m:NumberToWordsResult>
    </m:NumberToWordsResponse>
  </soap:Body>
</soap:Envelope>"#;

    #[test]
    fn test_envelope_layout() {
        let envelope = NumberToWords::new(500).to_envelope().unwrap();
        assert!(envelope.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(envelope.contains(&format!(
            r#"<soap:Envelope xmlns:soap="{SOAP_ENVELOPE_NS}">"#
        )));
        assert!(envelope.contains(&format!(
            r#"<NumberToWords xmlns="{NUMBER_CONVERSION_NS}"><ubiNum>500</ubiNum></NumberToWords>"#
        )));
        assert!(envelope.ends_with("</soap:Body></soap:Envelope>"));
    }

    #[test]
    fn test_envelope_reads_back() {
        let envelope = NumberToWords::new(42).to_envelope().unwrap();
        assert_eq!(
            element_text(&envelope, "ubiNum").unwrap().as_deref(),
            Some("42")
        );
    }

    #[test]
    fn test_number_to_words_result() {
        assert_eq!(number_to_words_result(RESPONSE).unwrap(), "five hundred");
    }

    #[test]
    fn test_missing_result() {
        let err = number_to_words_result("<soap:Envelope><soap:Body/></soap:Envelope>").unwrap_err();
        assert!(err.to_string().contains("no NumberToWordsResult"));
    }

    #[test]
    fn test_fault_is_reported() {
        let fault = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body><soap:Fault><faultcode>soap:Client</faultcode>
  <faultstring>Invalid ubiNum</faultstring></soap:Fault></soap:Body></soap:Envelope>"#;
        let err = number_to_words_result(fault).unwrap_err();
        assert_eq!(err.to_string(), "SOAP payload error: SOAP fault: Invalid ubiNum");
    }

    #[test]
    fn test_element_text_resolves_references() {
        let xml = "<r><v> Tom &amp; Jerry &#33; </v></r>";
        assert_eq!(
            element_text(xml, "v").unwrap().as_deref(),
            Some("Tom & Jerry !")
        );
    }

    #[test]
    fn test_element_text_reads_cdata() {
        let xml = "<r><v><![CDATA[a < b]]></v></r>";
        assert_eq!(element_text(xml, "v").unwrap().as_deref(), Some("a < b"));
    }

    #[test]
    fn test_element_text_rejects_unknown_entity() {
        let err = element_text("<r><v>&bogus;</v></r>", "v").unwrap_err();
        assert!(err.to_string().contains("unknown entity &bogus;"));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(element_text("<a><b></a>", "b").is_err());
    }
}
