use crate::cyclic_index::{CyclicIndex, NavigationError};

/// Keys the lightbox reacts to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// Full-screen viewer over the gallery images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    index: CyclicIndex,
    is_open: bool,
}

impl Lightbox {
    pub fn new(images: usize) -> Result<Self, NavigationError> {
        Ok(Self {
            index: CyclicIndex::new(images)?,
            is_open: false,
        })
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current(&self) -> usize {
        self.index.current()
    }

    pub fn open_at(&mut self, image: usize) -> Result<usize, NavigationError> {
        let current = self.index.jump_to(image)?;
        self.is_open = true;
        Ok(current)
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn next(&mut self) -> usize {
        self.index.advance()
    }

    pub fn previous(&mut self) -> usize {
        self.index.retreat()
    }

    /// Returns true when the key changed the lightbox
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.is_open {
            return false;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => {
                self.previous();
            }
            LightboxKey::ArrowRight => {
                self.next();
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_navigate() {
        let mut lightbox = Lightbox::new(6).unwrap();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.open_at(5), Ok(5));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.next(), 0);
        assert_eq!(lightbox.previous(), 5);
    }

    #[test]
    fn test_empty_gallery_rejected() {
        assert_eq!(Lightbox::new(0), Err(NavigationError::EmptyCollection));
    }

    #[test]
    fn test_open_out_of_range_stays_closed() {
        let mut lightbox = Lightbox::new(2).unwrap();
        assert!(lightbox.open_at(2).is_err());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut lightbox = Lightbox::new(3).unwrap();
        assert!(!lightbox.handle_key(LightboxKey::ArrowRight));
        assert_eq!(lightbox.current(), 0);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut lightbox = Lightbox::new(3).unwrap();
        lightbox.open_at(0).unwrap();
        assert!(lightbox.handle_key(LightboxKey::ArrowLeft));
        assert_eq!(lightbox.current(), 2);
        assert!(lightbox.handle_key(LightboxKey::ArrowRight));
        assert_eq!(lightbox.current(), 0);
        assert!(lightbox.handle_key(LightboxKey::Escape));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(LightboxKey::from_key("Escape"), Some(LightboxKey::Escape));
        assert_eq!(LightboxKey::from_key("Enter"), None);
    }
}
