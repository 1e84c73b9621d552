//! Two-color linear gradients

use dreamscaler_protocol::Rgbw;

fn lerp(a: u8, b: u8, step: i32, span: i32) -> u8 {
    let a = i32::from(a);
    let b = i32::from(b);
    // Truncates toward zero, so the result stays between a and b
    (a + (b - a) * step / span) as u8
}

/// Color at `step` of `span` steps from `from` to `to`
///
/// `step == 0` yields `from`, `step == span` yields `to`. A zero span
/// yields `from`.
pub fn interpolate(from: Rgbw, to: Rgbw, step: u16, span: u16) -> Rgbw {
    if span == 0 {
        return from;
    }
    let step = i32::from(step.min(span));
    let span = i32::from(span);
    Rgbw::new(
        lerp(from.r, to.r, step, span),
        lerp(from.g, to.g, step, span),
        lerp(from.b, to.b, step, span),
        lerp(from.w, to.w, step, span),
    )
}

/// Iterator over the unscaled colors of an inclusive index range
#[derive(Debug, Clone)]
pub struct Gradient {
    from: Rgbw,
    to: Rgbw,
    span: u16,
    step: u32,
}

impl Gradient {
    /// Gradient across `start..=end`
    ///
    /// An inverted range yields nothing.
    pub fn new(start: u16, end: u16, from: Rgbw, to: Rgbw) -> Self {
        let (span, step) = match end.checked_sub(start) {
            Some(span) => (span, 0),
            None => (0, 1),
        };
        Self {
            from,
            to,
            span,
            step,
        }
    }
}

impl Iterator for Gradient {
    type Item = Rgbw;

    fn next(&mut self) -> Option<Rgbw> {
        if self.step > u32::from(self.span) {
            return None;
        }
        let color = interpolate(self.from, self.to, self.step as u16, self.span);
        self.step += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u32::from(self.span) + 1).saturating_sub(self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Gradient {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WHITE: Rgbw = Rgbw::new(255, 255, 255, 255);

    #[test]
    fn test_black_to_white_ramp() {
        let ramp: heapless::Vec<Rgbw, 10> = Gradient::new(0, 9, Rgbw::BLACK, WHITE).collect();
        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp[0], Rgbw::BLACK);
        assert_eq!(ramp[9], WHITE);
        // 255 * 1 / 9 = 28.33
        assert_eq!(ramp[1], Rgbw::new(28, 28, 28, 28));
        for pair in ramp.windows(2) {
            assert!(pair[0].r <= pair[1].r);
            assert!(pair[0].w <= pair[1].w);
        }
    }

    #[test]
    fn test_single_index_is_from_color() {
        let mut single = Gradient::new(4, 4, Rgbw::new(1, 2, 3, 4), WHITE);
        assert_eq!(single.len(), 1);
        assert_eq!(single.next(), Some(Rgbw::new(1, 2, 3, 4)));
        assert_eq!(single.next(), None);
    }

    #[test]
    fn test_descending_channel_truncates_toward_zero() {
        // 100 + (0 - 100) * 1 / 3 = 100 - 33
        let color = interpolate(Rgbw::new(100, 0, 0, 0), Rgbw::BLACK, 1, 3);
        assert_eq!(color.r, 67);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert_eq!(Gradient::new(5, 2, Rgbw::BLACK, WHITE).count(), 0);
    }

    proptest! {
        #[test]
        fn prop_endpoints_are_exact(
            from in any::<[u8; 4]>(),
            to in any::<[u8; 4]>(),
            span in 1u16..1000,
        ) {
            let from = Rgbw::from_bytes(from);
            let to = Rgbw::from_bytes(to);
            prop_assert_eq!(interpolate(from, to, 0, span), from);
            prop_assert_eq!(interpolate(from, to, span, span), to);
        }

        #[test]
        fn prop_channels_stay_between_endpoints(
            a in any::<u8>(),
            b in any::<u8>(),
            span in 1u16..1000,
            step in 0u16..1000,
        ) {
            let step = step.min(span);
            let value = interpolate(Rgbw::white(a), Rgbw::white(b), step, span).w;
            prop_assert!(value >= a.min(b) && value <= a.max(b));
        }
    }
}
