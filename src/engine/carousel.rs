/// Controls exposed by the slider widget to whoever hosts it.
#[cfg_attr(test, mockall::automock)]
pub trait SlideControl {
    fn slide_prev(&self);
    fn slide_next(&self);
}

/// Previous/next buttons bound to a slider it does not own.
///
/// The slide index lives in the slider; the host only keeps the handle it was
/// given when the slider mounted.
pub struct CarouselHost<H> {
    handle: Option<H>,
}

impl<H> Default for CarouselHost<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: SlideControl> CarouselHost<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first handle offered; later ones are ignored.
    pub fn attach(&mut self, handle: H) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(handle);
        true
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    pub fn previous(&self) {
        if let Some(handle) = &self.handle {
            handle.slide_prev();
        }
    }

    pub fn next(&self) {
        if let Some(handle) = &self.handle {
            handle.slide_next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_delegate_to_the_slider() {
        let mut slider = MockSlideControl::new();
        slider.expect_slide_prev().times(1).return_const(());
        slider.expect_slide_next().times(2).return_const(());

        let mut host = CarouselHost::new();
        assert!(host.attach(slider));
        host.previous();
        host.next();
        host.next();
    }

    #[test]
    fn only_the_first_handle_is_kept() {
        let mut first = MockSlideControl::new();
        first.expect_slide_next().times(1).return_const(());
        let mut second = MockSlideControl::new();
        second.expect_slide_next().never();

        let mut host = CarouselHost::new();
        assert!(host.attach(first));
        assert!(!host.attach(second));
        host.next();
    }

    #[test]
    fn unattached_host_is_inert() {
        let host: CarouselHost<MockSlideControl> = CarouselHost::new();
        assert!(!host.is_attached());
        host.previous();
        host.next();
    }
}
