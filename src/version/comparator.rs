//! Update-availability ordering over parsed version segments

/// Decide whether the store version is newer than the local one.
///
/// Segments are compared element-wise up to the shorter length and the
/// first inequality wins. When every compared segment is equal, a longer
/// store sequence (an extra trailing component such as `1.2.0.1` against
/// `1.2.0`) counts as newer; a longer local sequence does not. Missing
/// trailing components are intentionally NOT zero-padded before the length
/// tie-break.
pub fn can_update(local: &[u64], store: &[u64]) -> bool {
    for (l, s) in local.iter().zip(store.iter()) {
        if s > l {
            return true;
        }
        if s < l {
            return false;
        }
    }
    store.len() > local.len()
}
