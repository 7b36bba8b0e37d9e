use uuid::Uuid;

/// Sort `items` according to `order`.
///
/// Items whose id is missing from the order array are appended in their
/// original encounter order. This is deliberately forgiving: the server may
/// hand back a column order that lags behind the column list itself, and the
/// client must still render every column.
pub fn derive_order<T, F>(items: Vec<T>, order: &[Uuid], id_of: F) -> Vec<T>
where
    F: Fn(&T) -> Uuid,
{
    let mut remaining: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(remaining.len());

    for id in order {
        for slot in remaining.iter_mut() {
            if slot.as_ref().map(|item| id_of(item)) == Some(*id) {
                if let Some(item) = slot.take() {
                    ordered.push(item);
                }
                break;
            }
        }
    }

    ordered.extend(remaining.into_iter().flatten());
    ordered
}

/// Move the element at `from` to `to`, shifting intervening elements.
///
/// Out-of-range `from` is a no-op; `to` is clamped to the list length after
/// removal. Matches the array-move semantics drag libraries expose.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}
