// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_class(methods: usize) -> String {
    let mut content = String::from("class Generated {\n");
    for i in 0..methods {
        content.push_str(&format!(
            "    int method{i}(int x) {{\n        if (x > {i}) {{\n            return {i};\n        }}\n        // log it\n        System.out.println(x);\n        return x;\n    }}\n"
        ));
    }
    content.push_str("}\n");
    content
}
