use glint_env::{Platform, PlatformLoader, ProcAddressSource};

fn main() {
    let platform = Platform::detect();
    println!("Host platform: {}", platform.name());
    println!("  GL library: {}", platform.gl_library().unwrap_or("<none>"));

    let start = std::time::Instant::now();
    let loader = match PlatformLoader::get() {
        Ok(loader) => loader,
        Err(err) => {
            println!("No symbol locator: {}", err);
            return;
        }
    };
    println!("Selected {} locator in {} microseconds", loader.kind(), start.elapsed().as_micros());

    for name in std::env::args().skip(1) {
        let address = loader.proc_address(&name);
        if address.is_null() {
            println!("  {:<32} <absent>", name);
        } else {
            println!("  {:<32} {:p}", name, address);
        }
    }

    let start = std::time::Instant::now();
    let _loader = PlatformLoader::get();
    println!("Second selection took {} microseconds (cached)", start.elapsed().as_micros());
}
