//! SQL fragments for read-time joins.
//!
//! Each macro expands to a correlated sub-select that aggregates the matching
//! rows of a related table into a JSON array. A NULL or dangling reference
//! yields `[]`, so the primary row is never dropped or duplicated.

macro_rules! user_info {
    ($column:literal) => {
        concat!(
            "COALESCE((SELECT json_agg(json_build_object(",
            "'id', u.id, 'email', u.email, 'user_name', u.user_name, ",
            "'position', u.position, 'photo', u.photo)) ",
            "FROM users u WHERE u.id = ",
            $column,
            "), '[]'::json)"
        )
    };
}

macro_rules! department_info {
    ($column:literal) => {
        concat!(
            "COALESCE((SELECT json_agg(json_build_object(",
            "'id', d.id, 'name', d.name, 'parent', d.parent_id)) ",
            "FROM departments d WHERE d.id = ",
            $column,
            "), '[]'::json)"
        )
    };
}

macro_rules! project_info {
    ($column:literal) => {
        concat!(
            "COALESCE((SELECT json_agg(json_build_object(",
            "'id', p.id, 'name', p.name, 'start_dt', p.start_dt, 'end_dt', p.end_dt)) ",
            "FROM projects p WHERE p.id = ",
            $column,
            "), '[]'::json)"
        )
    };
}
