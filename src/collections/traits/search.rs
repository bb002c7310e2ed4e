/// Returns the index of the first item in `items` equal to `value`, or [`None`] if there isn't one.
///
/// # Examples
/// ```
/// # use generic_stack::collections::traits::find_index;
/// let animals = ["cat", "dog", "llama", "parakeet", "terrapin"];
/// assert_eq!(find_index(&"llama", &animals), Some(2));
/// assert_eq!(find_index(&9.3, &[3.14159, 0.1, 0.25]), None);
/// ```
pub fn find_index<T: PartialEq>(value: &T, items: &[T]) -> Option<usize> {
    for (index, item) in items.iter().enumerate() {
        if item == value { return Some(index); }
    }
    None
}
