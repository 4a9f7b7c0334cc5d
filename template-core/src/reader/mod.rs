mod checkbox;

use crate::errors::TemplateError;
use std::io::Read;

pub trait FromXML {
    fn from_xml<R: Read>(reader: R) -> Result<Self, TemplateError>
    where
        Self: std::marker::Sized;
}
