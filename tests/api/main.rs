mod lifecycle;
mod validation;
