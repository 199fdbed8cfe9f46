use glidetype::{PointerEvent, StrokeBuilder};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let text = match std::str::from_utf8(data) {
                Ok(t) => t,
                Err(_) => return,
            };
            let mut builder = StrokeBuilder::new();
            for line in text.lines() {
                if let Some(event) = PointerEvent::parse_line(line) {
                    if let Some(stroke) = builder.push(event) {
                        assert!(!stroke.is_empty());
                    }
                }
            }
        });
    }
}
