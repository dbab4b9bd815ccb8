use serde_json::{Map, Value};

/// Keys owned by the store. Clients may echo them back from a read; they are
/// never written.
const SYSTEM_FIELDS: &[&str] = &[
    "_id",
    "id",
    "__v",
    "version",
    "createdAt",
    "updatedAt",
    "created_at",
    "updated_at",
];

/// Output-only flags added by the visitor read.
const READ_ONLY_FLAGS: &[&str] = &["hasImage", "hasResume"];

fn strip_keys(map: &mut Map<String, Value>, keys: &[&str]) {
    for key in keys {
        map.remove(*key);
    }
}

/// Removes system-managed keys at the top level, inside `personal`,
/// `personal.social` and every element of `education` / `projects`.
pub fn strip_system_fields(value: &mut Value) {
    let Some(root) = value.as_object_mut() else {
        return;
    };

    strip_keys(root, SYSTEM_FIELDS);
    strip_keys(root, &["fallback"]);

    if let Some(personal) = root.get_mut("personal").and_then(Value::as_object_mut) {
        strip_keys(personal, SYSTEM_FIELDS);
        strip_keys(personal, READ_ONLY_FLAGS);

        if let Some(social) = personal.get_mut("social").and_then(Value::as_object_mut) {
            strip_keys(social, SYSTEM_FIELDS);
        }
    }

    for section in ["education", "projects"] {
        if let Some(items) = root.get_mut(section).and_then(Value::as_array_mut) {
            for item in items.iter_mut().filter_map(Value::as_object_mut) {
                strip_keys(item, SYSTEM_FIELDS);
            }
        }
    }
}
