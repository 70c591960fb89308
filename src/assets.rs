use crate::error::{AssetError, Error};
use qoi::{Channels, Decoder, Header};
use std::path::Path;

/// RGBA8 image ready to be copied into the frame.
#[derive(Clone, Debug)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Texture {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let wrap = |source: AssetError| Error::Asset { path: path.to_path_buf(), source };
        let bytes = std::fs::read(path).map_err(|e| wrap(e.into()))?;
        let texture = Self::decode(&bytes).map_err(wrap)?;
        log::info!("loaded {} ({}x{})", path.display(), texture.width, texture.height);
        Ok(texture)
    }

    /// RGB input is widened to opaque RGBA.
    pub fn decode(bytes: &[u8]) -> Result<Self, AssetError> {
        let mut decoder = Decoder::new(bytes)?.with_channels(Channels::Rgba);
        let &Header { width, height, .. } = decoder.header();
        let rgba = decoder.decode_to_vec()?;
        Ok(Self { width, height, rgba })
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.rgba.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}
