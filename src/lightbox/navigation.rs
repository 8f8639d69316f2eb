//! Wraparound index arithmetic.
//!
//! Kept apart from the controller so it can be tested without a rendering
//! surface.

use super::error::LightboxError;

/// Check that `index` addresses an item in a catalog of `len` items
pub fn validate_index(index: usize, len: usize) -> Result<usize, LightboxError> {
    if len == 0 {
        return Err(LightboxError::EmptyCatalog);
    }
    if index >= len {
        return Err(LightboxError::InvalidIndex { index, len });
    }
    Ok(index)
}

/// `(current + 1) mod len`
pub fn next_index(current: usize, len: usize) -> Result<usize, LightboxError> {
    validate_index(current, len)?;
    Ok((current + 1) % len)
}

/// `(current - 1 + len) mod len`
pub fn previous_index(current: usize, len: usize) -> Result<usize, LightboxError> {
    validate_index(current, len)?;
    Ok((current + len - 1) % len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_start() {
        assert_eq!(next_index(0, 3), Ok(1));
        assert_eq!(next_index(2, 3), Ok(0));
        assert_eq!(next_index(0, 1), Ok(0));
    }

    #[test]
    fn test_previous_wraps_to_end() {
        assert_eq!(previous_index(2, 3), Ok(1));
        assert_eq!(previous_index(0, 3), Ok(2));
        assert_eq!(previous_index(0, 1), Ok(0));
    }

    #[test]
    fn test_next_n_times_is_identity() {
        for len in 1..=9 {
            for start in 0..len {
                let mut index = start;
                for _ in 0..len {
                    index = next_index(index, len).unwrap();
                }
                assert_eq!(index, start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        for len in 1..=9 {
            for start in 0..len {
                let forward = next_index(start, len).unwrap();
                assert_eq!(previous_index(forward, len), Ok(start));
            }
        }
    }

    #[test]
    fn test_validate_index() {
        assert_eq!(validate_index(0, 0), Err(LightboxError::EmptyCatalog));
        assert_eq!(
            validate_index(3, 3),
            Err(LightboxError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(validate_index(2, 3), Ok(2));
    }
}
