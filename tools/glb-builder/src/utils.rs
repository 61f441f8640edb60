//! Small helpers shared by the builders

/// Bounding box of a position list (`([f32::MAX; 3], [f32::MIN; 3])` when empty)
pub fn compute_bounds(positions: &[[f32; 3]]) -> (Vec<f32>, Vec<f32>) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for pos in positions {
        for i in 0..3 {
            min[i] = min[i].min(pos[i]);
            max[i] = max[i].max(pos[i]);
        }
    }

    (min.to_vec(), max.to_vec())
}

/// Pad a buffer with zeros to a 4-byte boundary
pub fn align_buffer(buffer: &mut Vec<u8>) {
    pad_to_four(buffer, 0);
}

/// Pad `bytes` with `fill` to a 4-byte boundary
pub fn pad_to_four(bytes: &mut Vec<u8>, fill: u8) {
    let padding = (4 - bytes.len() % 4) % 4;
    bytes.extend(std::iter::repeat_n(fill, padding));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bounds() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 2.0, 3.0], [-1.0, -2.0, -3.0]];
        let (min, max) = compute_bounds(&positions);
        assert_eq!(min, vec![-1.0, -2.0, -3.0]);
        assert_eq!(max, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_pad_to_four() {
        let mut buffer = vec![1, 2, 3];
        align_buffer(&mut buffer);
        assert_eq!(buffer, vec![1, 2, 3, 0]);

        let mut text = b"{}".to_vec();
        pad_to_four(&mut text, b' ');
        assert_eq!(text, b"{}  ");

        let mut aligned = vec![1, 2, 3, 4];
        align_buffer(&mut aligned);
        assert_eq!(aligned.len(), 4);
    }
}
