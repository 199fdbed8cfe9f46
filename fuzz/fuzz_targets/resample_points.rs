use glidetype::{resample, Point};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let mut points = Vec::new();
            for chunk in data.chunks_exact(16) {
                let x = f64::from_le_bytes(chunk[..8].try_into().unwrap());
                let y = f64::from_le_bytes(chunk[8..].try_into().unwrap());
                if x.is_finite() && y.is_finite() {
                    points.push(Point::new(x, y));
                }
            }
            if points.is_empty() {
                return;
            }
            let out = resample(&points, 50);
            assert_eq!(out.len(), 50);
        });
    }
}
