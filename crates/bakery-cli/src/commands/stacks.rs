use bakery_core::TechStack;

pub fn stacks() {
    println!("Supported tech stacks:");
    for stack in TechStack::ALL {
        if stack == TechStack::default() {
            println!("  {stack} (default)");
        } else {
            println!("  {stack}");
        }
    }
}
