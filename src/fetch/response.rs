//! Decodes the XML body returned by the LDAPS point service into [`ForecastItem`]s.
//!
//! A response looks like:
//!
//! ```xml
//! <response>
//!   <header><resultCode>00</resultCode><resultMsg>NORMAL_SERVICE</resultMsg></header>
//!   <body><items>
//!     <item><dataTypeCd>Temp</dataTypeCd><fcstTime>202403150900</fcstTime><value>5.1</value></item>
//!   </items></body>
//! </response>
//! ```
//!
//! `item` elements are collected wherever they appear in the document.

use crate::fetch::error::FetchError;
use crate::types::forecast_item::ForecastItem;
use quick_xml::events::Event;
use quick_xml::Reader;

const SUCCESS_CODE: &str = "00";

// Length of the body excerpt carried by `FetchError::NotXml`.
const EXCERPT_CHARS: usize = 80;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    FcstTime,
    Value,
    ResultCode,
    ResultMsg,
}

#[derive(Default)]
struct PendingItem {
    fcst_time: Option<String>,
    value: String,
}

/// Parses a response body.
///
/// Items without an `fcstTime` are dropped, since they cannot be keyed by date
/// and hour. A missing `value` becomes an empty string.
///
/// # Errors
///
/// Returns [`FetchError::Xml`] for a body that is not well-formed XML,
/// [`FetchError::NotXml`] when there is no single root element or text sits
/// outside it, [`FetchError::Truncated`] when the body ends inside an element,
/// and [`FetchError::Service`] when the header carries a non-success result code.
/// No items are returned in any of these cases.
pub fn parse_forecast_items(body: &str) -> Result<Vec<ForecastItem>, FetchError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut root_seen = false;
    let mut item_depth: Option<usize> = None;
    let mut pending = PendingItem::default();
    let mut field: Option<Field> = None;
    let mut result_code: Option<String> = None;
    let mut result_msg = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if depth == 0 {
                    expect_single_root(&mut root_seen, body)?;
                }
                let name = start.name();
                match item_depth {
                    None if name.as_ref() == b"item" => {
                        item_depth = Some(depth);
                        pending = PendingItem::default();
                    }
                    Some(open) if depth == open + 1 => {
                        field = match name.as_ref() {
                            b"fcstTime" => Some(Field::FcstTime),
                            b"value" => Some(Field::Value),
                            _ => None,
                        };
                    }
                    None => {
                        field = match name.as_ref() {
                            b"resultCode" => Some(Field::ResultCode),
                            b"resultMsg" => Some(Field::ResultMsg),
                            _ => None,
                        };
                    }
                    Some(_) => field = None,
                }
                depth += 1;
            }
            Event::End(end) => {
                depth = depth.saturating_sub(1);
                field = None;
                if item_depth == Some(depth) && end.name().as_ref() == b"item" {
                    item_depth = None;
                    let finished = std::mem::take(&mut pending);
                    if let Some(fcst_time) = finished.fcst_time.filter(|t| !t.is_empty()) {
                        items.push(ForecastItem::new(fcst_time, finished.value));
                    }
                }
            }
            Event::Empty(_) if depth == 0 => expect_single_root(&mut root_seen, body)?,
            Event::Text(text) => {
                let text = text.unescape()?;
                if depth == 0 && !text.trim().is_empty() {
                    return Err(not_xml(body));
                }
                record(field, &text, &mut pending, &mut result_code, &mut result_msg);
            }
            Event::CData(_) if depth == 0 => return Err(not_xml(body)),
            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                record(field, &text, &mut pending, &mut result_code, &mut result_msg);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(FetchError::Truncated(depth));
    }
    if !root_seen {
        return Err(not_xml(body));
    }

    match result_code {
        Some(code) if code != SUCCESS_CODE => Err(FetchError::Service {
            code,
            message: result_msg,
        }),
        _ => Ok(items),
    }
}

fn expect_single_root(root_seen: &mut bool, body: &str) -> Result<(), FetchError> {
    if std::mem::replace(root_seen, true) {
        return Err(not_xml(body));
    }
    Ok(())
}

fn not_xml(body: &str) -> FetchError {
    FetchError::NotXml(body.trim().chars().take(EXCERPT_CHARS).collect())
}

fn record(
    field: Option<Field>,
    text: &str,
    pending: &mut PendingItem,
    result_code: &mut Option<String>,
    result_msg: &mut String,
) {
    match field {
        Some(Field::FcstTime) => pending
            .fcst_time
            .get_or_insert_with(String::new)
            .push_str(text),
        Some(Field::Value) => pending.value.push_str(text),
        Some(Field::ResultCode) => result_code.get_or_insert_with(String::new).push_str(text),
        Some(Field::ResultMsg) => result_msg.push_str(text),
        None => {}
    }
}
