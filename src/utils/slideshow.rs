use snafu::Snafu;

/// Cycling direction for [`Slideshow::advance`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum SlideshowError {
    #[snafu(display("A slideshow needs at least one slide"))]
    NoSlides,
}

/// An ordered set of slides with exactly one active at a time.
///
/// Advancing past either end wraps around to the opposite end. Instances are
/// fully independent; nothing is shared between two slideshows.
#[derive(Debug, Clone)]
pub struct Slideshow<T> {
    slides: Vec<T>,
    active: usize,
}

impl<T> Slideshow<T> {
    /// Creates a slideshow with the first slide active.
    pub fn new(slides: Vec<T>) -> Result<Self, SlideshowError> {
        if slides.is_empty() {
            return NoSlidesErr.fail();
        }
        Ok(Slideshow { slides, active: 0 })
    }

    /// Moves the active mark to the neighboring slide, wrapping last->first
    /// going forward and first->last going backward.
    pub fn advance(&mut self, direction: Direction) {
        self.active = match direction {
            Direction::Forward => {
                if self.active + 1 == self.slides.len() {
                    0
                } else {
                    self.active + 1
                }
            }
            Direction::Backward => {
                if self.active == 0 {
                    self.slides.len() - 1
                } else {
                    self.active - 1
                }
            }
        };
    }

    pub fn active(&self) -> &T {
        &self.slides[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
