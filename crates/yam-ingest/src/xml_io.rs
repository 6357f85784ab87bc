//! XML import: diagnostic element dump.
//!
//! No source service currently exports XML the mapping core understands;
//! the importer still accepts `.xml` inputs and shows what is inside so the
//! user can see what they handed it.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, info};

use crate::IngestError;

/// Parses an XML file and returns the element names it contains, in
/// document order.
pub fn read_xml(path: &Path) -> Result<Vec<String>, IngestError> {
    info!(path = %path.display(), "importing xml file");
    let mut reader = Reader::from_file(path).map_err(|source| IngestError::Xml {
        path: path.to_path_buf(),
        source,
    })?;
    reader.config_mut().trim_text(true);

    let mut elements = Vec::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                debug!(element = %name, "xml element");
                elements.push(name);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(source) => {
                return Err(IngestError::Xml {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
        buf.clear();
    }
    info!(elements = elements.len(), "xml import complete");
    Ok(elements)
}
