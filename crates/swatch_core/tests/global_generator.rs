use swatch_core::{generate_utility_class, ClassNameGenerator};

// The global generator is process-wide, so every case lives in this one test
// and resets before returning.
#[test]
fn global_generator_configure_and_reset() {
    let global = ClassNameGenerator::global();
    global.reset();

    assert_eq!(
        generate_utility_class(global, "SwatchButton", "root", None),
        "SwatchButton-root"
    );

    global.configure(|name| format!("app-{}", name.to_lowercase()));
    assert_eq!(
        generate_utility_class(global, "SwatchButton", "root", None),
        "app-swatchbutton-root"
    );
    assert_eq!(
        generate_utility_class(ClassNameGenerator::global(), "SwatchButton", "checked", None),
        "Swatch-checked"
    );

    global.reset();
    assert_eq!(global.generate("SwatchButton"), "SwatchButton");
}
