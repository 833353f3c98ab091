use log::error;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

/// One labeled bounding box from a Pascal VOC annotation, carrying the image
/// dimensions it was recorded against.
///
/// Values stay verbatim as strings; the CSV index never interprets them, so
/// neither do we. Class names are uppercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocObject {
    pub width: String,
    pub height: String,
    pub class_name: String,
    pub xmin: String,
    pub ymin: String,
    pub xmax: String,
    pub ymax: String,
}

#[derive(Default)]
struct PendingObject {
    class_name: String,
    has_bndbox: bool,
    xmin: String,
    ymin: String,
    xmax: String,
    ymax: String,
}

/// Read and parse a single VOC annotation file into its flattened objects
pub fn read_and_parse_voc(path: &Path) -> Option<Vec<VocObject>> {
    match parse_voc_file(path) {
        Ok(objects) => Some(objects),
        Err(e) => {
            error!(
                "Failed to parse VOC annotation ({}): {:?}",
                path.display(),
                e
            );
            None
        }
    }
}

fn parse_voc_file(path: &Path) -> Result<Vec<VocObject>, quick_xml::Error> {
    let mut reader = Reader::from_file(path)?;
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut width = String::new();
    let mut height = String::new();
    let mut current: Option<PendingObject> = None;
    let mut objects = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                match name.as_str() {
                    "object" => current = Some(PendingObject::default()),
                    "bndbox" => {
                        if let Some(pending) = current.as_mut() {
                            pending.has_bndbox = true;
                        }
                    }
                    _ => {}
                }
                stack.push(name);
            }
            Event::End(_) => {
                if stack.pop().as_deref() == Some("object") {
                    // Objects without a bounding box carry nothing indexable
                    if let Some(pending) = current.take() {
                        if pending.has_bndbox {
                            objects.push(VocObject {
                                width: width.clone(),
                                height: height.clone(),
                                class_name: pending.class_name,
                                xmin: pending.xmin,
                                ymin: pending.ymin,
                                xmax: pending.xmax,
                                ymax: pending.ymax,
                            });
                        }
                    }
                }
            }
            Event::Text(text) => {
                let value = text.unescape()?.into_owned();
                let leaf = stack.last().map(String::as_str);
                let parent = stack
                    .len()
                    .checked_sub(2)
                    .and_then(|i| stack.get(i))
                    .map(String::as_str);
                match (parent, leaf) {
                    (Some("size"), Some("width")) => width = value,
                    (Some("size"), Some("height")) => height = value,
                    (Some("object"), Some("name")) => {
                        if let Some(pending) = current.as_mut() {
                            pending.class_name = value.to_uppercase();
                        }
                    }
                    (Some("bndbox"), Some("xmin")) => {
                        if let Some(pending) = current.as_mut() {
                            pending.xmin = value;
                        }
                    }
                    (Some("bndbox"), Some("ymin")) => {
                        if let Some(pending) = current.as_mut() {
                            pending.ymin = value;
                        }
                    }
                    (Some("bndbox"), Some("xmax")) => {
                        if let Some(pending) = current.as_mut() {
                            pending.xmax = value;
                        }
                    }
                    (Some("bndbox"), Some("ymax")) => {
                        if let Some(pending) = current.as_mut() {
                            pending.ymax = value;
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(objects)
}
