use std::fmt;

use crate::parser::{ParseStatus, XmlSAXHandler, xml_sax_user_parse_memory};

fn start_document(events: &mut Vec<String>) {
    events.push("SAX.startDocument()".to_owned());
}

fn end_document(events: &mut Vec<String>) {
    events.push("SAX.endDocument()".to_owned());
}

fn start_element(events: &mut Vec<String>, name: &str, atts: &[(String, String)]) {
    let mut event = format!("SAX.startElement({name}");
    for (key, value) in atts {
        event.push_str(&format!(", {key}='{value}'"));
    }
    event.push(')');
    events.push(event);
}

fn end_element(events: &mut Vec<String>, name: &str) {
    events.push(format!("SAX.endElement({name})"));
}

fn characters(events: &mut Vec<String>, ch: &str) {
    events.push(format!("SAX.characters({ch})"));
}

fn cdata_block(events: &mut Vec<String>, value: &str) {
    events.push(format!("SAX.pcdata({value})"));
}

fn processing_instruction(events: &mut Vec<String>, target: &str, data: Option<&str>) {
    events.push(format!(
        "SAX.processingInstruction({target}, {})",
        data.unwrap_or("NULL")
    ));
}

fn comment(events: &mut Vec<String>, value: &str) {
    events.push(format!("SAX.comment({value})"));
}

fn warning(events: &mut Vec<String>, msg: fmt::Arguments<'_>) {
    events.push(format!("SAX.warning: {}", msg.to_string().trim_end()));
}

fn error(events: &mut Vec<String>, msg: fmt::Arguments<'_>) {
    events.push(format!("SAX.error: {}", msg.to_string().trim_end()));
}

fn fatal_error(events: &mut Vec<String>, msg: fmt::Arguments<'_>) {
    events.push(format!("SAX.fatalError: {}", msg.to_string().trim_end()));
}

/// A handler recording every event as one line, in the manner of `xmllint --sax1`.
pub(crate) fn debug_sax_handler() -> XmlSAXHandler<Vec<String>> {
    XmlSAXHandler {
        start_document: Some(start_document),
        end_document: Some(end_document),
        start_element: Some(start_element),
        end_element: Some(end_element),
        characters: Some(characters),
        cdata_block: Some(cdata_block),
        processing_instruction: Some(processing_instruction),
        comment: Some(comment),
        warning: Some(warning),
        error: Some(error),
        fatal_error: Some(fatal_error),
    }
}

/// Parse `doc` and return the recorded events.
pub(crate) fn parse_events(doc: &str, options: i32) -> (Vec<String>, ParseStatus) {
    let sax = debug_sax_handler();
    let mut events = vec![];
    let status = xml_sax_user_parse_memory(&sax, &mut events, doc.as_bytes(), options);
    (events, status)
}
