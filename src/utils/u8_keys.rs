/// Above this many keys a binary search beats the linear scan.
const LINEAR_SEARCH_MAX: usize = 16;

fn binary_find_key(key: u8, keys: &[u8]) -> Option<usize> {
    let mut left = 0;
    let mut right = keys.len();
    while left < right {
        let mid = (left + right) / 2;
        if keys[mid] == key {
            return Some(mid);
        } else if keys[mid] < key {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    None
}

/// Position of `key` within the sorted `keys`, if present.
pub fn u8_keys_find_key_position(key: u8, keys: &[u8]) -> Option<usize> {
    if keys.len() > LINEAR_SEARCH_MAX {
        return binary_find_key(key, keys);
    }
    // Linear search seems to outperform binary search despite the array being sorted.
    // This is probably because the array is so small.
    keys.iter().position(|&k| k == key)
}

/// Position at which `key` must be inserted to keep `keys` sorted.
pub fn u8_keys_find_insert_position(key: u8, keys: &[u8]) -> usize {
    if keys.len() > LINEAR_SEARCH_MAX {
        return keys.partition_point(|&k| k < key);
    }
    keys.iter().position(|&k| key < k).unwrap_or(keys.len())
}
