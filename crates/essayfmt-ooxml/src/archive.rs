//! Archive handling for DOCX files
//!
//! DOCX files are ZIP archives containing XML parts and resources. The
//! writer assembles the parts into an [`OoxmlArchive`] and serializes it;
//! tests and tooling can read generated files back through the same type.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::Path;

use zip::read::ZipArchive;
use zip::write::ZipWriter;
use zip::CompressionMethod;

use crate::error::{DocxError, Result};

/// An unpacked OOXML document
#[derive(Debug, Default)]
pub struct OoxmlArchive {
    /// All files in the archive, keyed by path
    files: HashMap<String, Vec<u8>>,
}

impl OoxmlArchive {
    /// Create an empty archive
    pub fn new() -> Self {
        Self::default()
    }

    /// Open and unpack an existing DOCX file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Create from any reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut files = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();

            // Skip directories
            if name.ends_with('/') {
                continue;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            files.insert(name, contents);
        }

        Ok(Self { files })
    }

    /// Get a file's contents by path
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    /// Get a file's contents as a string
    pub fn get_string(&self, path: &str) -> Result<Option<String>> {
        match self.files.get(path) {
            Some(bytes) => {
                let s = String::from_utf8_lossy(bytes).into_owned();
                Ok(Some(s))
            }
            None => Ok(None),
        }
    }

    /// Get the main document content (word/document.xml)
    pub fn document_xml(&self) -> Result<&[u8]> {
        self.get("word/document.xml")
            .ok_or_else(|| DocxError::MissingFile("word/document.xml".to_string()))
    }

    /// Get the styles definition (word/styles.xml)
    pub fn styles_xml(&self) -> Result<&[u8]> {
        self.get("word/styles.xml")
            .ok_or_else(|| DocxError::MissingFile("word/styles.xml".to_string()))
    }

    /// Check if a file exists in the archive
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// List all files in the archive
    pub fn file_list(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|s| s.as_str())
    }

    /// Set or update a file's contents
    pub fn set(&mut self, path: impl Into<String>, contents: Vec<u8>) {
        self.files.insert(path.into(), contents);
    }

    /// Set a file's contents from a string
    pub fn set_string(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into().into_bytes());
    }

    /// Remove a file from the archive
    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(path)
    }

    /// Write the archive to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(file)
    }

    /// Write the archive to any writer
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated);

        // Sort keys for deterministic output
        let mut paths: Vec<_> = self.files.keys().collect();
        paths.sort();

        for path in paths {
            let contents = &self.files[path];
            zip.start_file(path.as_str(), options)?;
            zip.write_all(contents)?;
        }

        zip.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_file_operations() {
        let mut archive = OoxmlArchive::new();

        archive.set_string("test.xml", "<root/>");
        assert!(archive.contains("test.xml"));
        assert_eq!(
            archive.get_string("test.xml").unwrap(),
            Some("<root/>".to_string())
        );

        archive.remove("test.xml");
        assert!(!archive.contains("test.xml"));
    }

    #[test]
    fn test_missing_document_xml() {
        let archive = OoxmlArchive::new();
        assert!(matches!(
            archive.document_xml(),
            Err(DocxError::MissingFile(_))
        ));
    }

    #[test]
    fn test_roundtrip_through_zip() {
        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", r#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#);
        archive.set_string("word/document.xml", r#"<?xml version="1.0"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body/></w:document>"#);

        let mut buffer = Cursor::new(Vec::new());
        archive.write_to(&mut buffer).unwrap();

        buffer.set_position(0);
        let restored = OoxmlArchive::from_reader(buffer).unwrap();
        assert!(restored.contains("word/document.xml"));
        assert!(restored.document_xml().is_ok());
    }
}
