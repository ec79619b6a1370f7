use lambdacheck_lib::{ACCEPTED_SIGNATURES, DOC_URL};

pub fn run() {
    print!("{}", render());
}

fn render() -> String {
    let mut out = format!("Accepted handler signatures ({}):\n", ACCEPTED_SIGNATURES.len());
    for signature in ACCEPTED_SIGNATURES {
        out.push_str(&format!("  {signature}\n"));
    }
    out.push_str("\nTIn and TOut are types compatible with the encoding/json standard library.\n");
    out.push_str(&format!("See {DOC_URL}\n"));
    out
}
