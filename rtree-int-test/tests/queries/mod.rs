mod search_test;
