use crate::op::{OpMode, Operation, Resolved};
use crate::state::QueryState;
use crate::value::{QueryValue, is_truthy};

/// Apply `ops` in order to a copy of `base` and return the result. The
/// caller's state is never touched. `append_mode` is echoed back unchanged
/// for the serializer's leading-separator choice.
///
/// Total over every operation sequence: unresolved values and removals of
/// absent elements are no-ops, never errors.
#[must_use]
pub fn merge(base: &QueryState, ops: &[Operation], append_mode: bool) -> (QueryState, bool) {
    let mut state = base.clone();
    for op in ops {
        match &op.resolved {
            Resolved::Absent => {}
            Resolved::Unset => {
                state.remove(&op.key);
            }
            Resolved::Present(value) => apply_present(&mut state, op, value),
        }
    }
    (state, append_mode)
}

fn apply_present(state: &mut QueryState, op: &Operation, value: &str) {
    if state.contains_key(&op.key) {
        if let Some(QueryValue::List(items)) = state.get_mut(&op.key) {
            match op.mode {
                OpMode::Append => {
                    // falsy elements are allowed inside lists; the
                    // truthiness rule only guards whole-key writes
                    items.push(value.to_string());
                    return;
                }
                OpMode::Remove => {
                    if let Some(index) = items.iter().position(|item| item.as_str() == value) {
                        items.remove(index);
                    }
                    return;
                }
                OpMode::Set => {}
            }
        }
        // existing scalar (any mode), or a plain set over a list: a falsy
        // replacement never overwrites an existing value
        if is_truthy(value) {
            state.insert(&op.key, QueryValue::scalar(value));
        }
    } else if is_truthy(value) {
        let created = if op.mode == OpMode::Append {
            QueryValue::list([value])
        } else {
            QueryValue::scalar(value)
        };
        state.insert(&op.key, created);
    }
}
