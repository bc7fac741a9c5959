//! Sprite pixel data and handle issuing
//!
//! The library owns raw RGBA pixel sprites and hands out the opaque
//! `SpriteHandle`s the world stores. Decoding image files is someone else's
//! job; demos build their sprites procedurally.

use strafe_core::ecs::SpriteHandle;

/// One sprite's pixels, RGBA8, row-major from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpritePixels {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl SpritePixels {
    /// A `width` x `height` sprite filled with one color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// A two-color checkerboard with `cell`-pixel squares.
    pub fn checker(width: u32, height: u32, cell: u32, even: [u8; 4], odd: [u8; 4]) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let cell = cell.max(1);
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let color = if ((x / cell) + (y / cell)) % 2 == 0 {
                    even
                } else {
                    odd
                };
                data.extend_from_slice(&color);
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, `width * height * 4` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Owner of all loaded sprites, keyed by the handles it issues.
///
/// Handles index into the library and are never reused or invalidated; the
/// library only grows for the lifetime of a demo.
#[derive(Default)]
pub struct SpriteLibrary {
    sprites: Vec<SpritePixels>,
}

impl SpriteLibrary {
    pub fn new() -> Self {
        Self {
            sprites: Vec::new(),
        }
    }

    /// Register a sprite and issue its handle.
    pub fn insert(&mut self, pixels: SpritePixels) -> SpriteHandle {
        let handle = SpriteHandle::new(self.sprites.len() as u32);
        tracing::debug!(
            handle = handle.raw(),
            width = pixels.width(),
            height = pixels.height(),
            "registered sprite"
        );
        self.sprites.push(pixels);
        handle
    }

    pub fn get(&self, handle: SpriteHandle) -> Option<&SpritePixels> {
        self.sprites.get(handle.raw() as usize)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// All sprites in handle order, for uploading to a GPU atlas.
    pub fn iter(&self) -> impl Iterator<Item = (SpriteHandle, &SpritePixels)> {
        self.sprites
            .iter()
            .enumerate()
            .map(|(index, pixels)| (SpriteHandle::new(index as u32), pixels))
    }
}
