crate::reexport!(field_type);
crate::reexport!(field);
crate::reexport!(table);
