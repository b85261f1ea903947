mod string_ids;
