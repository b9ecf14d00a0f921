use crate::domain::fields::FieldSet;
use crate::error::Result;
use std::io::Write;

/// Writes encoded gateway fields as `name,value` CSV rows.
pub struct FieldWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> FieldWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_fields(&mut self, fields: &FieldSet) -> Result<()> {
        for field in fields {
            self.writer.serialize(field)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
