mod tests_component;
mod tests_composition;
mod tests_dispatch;
