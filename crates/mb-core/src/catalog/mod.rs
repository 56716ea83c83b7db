use bytes::Bytes;

/// Handle to an image asset held in memory by the bundle catalog.
///
/// Cloning is cheap: the encoded payload is reference-counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    /// Identifier the asset is registered under (file stem in the bundle).
    pub id: String,
    /// Pixel width of the decoded image.
    pub width: u32,
    /// Pixel height of the decoded image.
    pub height: u32,
    /// Raw encoded bytes of the asset.
    pub bytes: Bytes,
}

impl ImageHandle {
    pub fn new(id: impl Into<String>, width: u32, height: u32, bytes: Bytes) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            bytes,
        }
    }

    /// Logical size in bytes of the encoded payload.
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
#[test]
fn test_image_handle_builds() {
    let handle = ImageHandle::new("Salmon", 640, 480, Bytes::from_static(&[1, 2, 3]));
    assert_eq!(handle.id, "Salmon");
    assert_eq!(handle.size_bytes(), 3);
}
