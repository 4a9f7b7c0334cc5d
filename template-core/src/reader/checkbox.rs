use quick_xml::de::from_reader;
use std::io::{BufReader, Read};

use crate::documents::Checkbox;
use crate::reader::FromXML;
use crate::TemplateError;

impl FromXML for Checkbox {
    fn from_xml<R: Read>(reader: R) -> Result<Self, TemplateError> {
        Ok(from_reader(BufReader::new(reader))?)
    }
}
