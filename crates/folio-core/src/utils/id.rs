/// Generate a short URL-friendly id for transcript entries
///
/// 21 characters from nanoid's default alphabet.
pub fn generate_id() -> String {
    nanoid::nanoid!()
}
