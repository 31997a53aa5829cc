mod related;
