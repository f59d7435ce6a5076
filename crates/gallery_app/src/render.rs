use gallery_core::FetchState;

/// Writes the console view for one state.
pub fn render(state: &FetchState) {
    match state {
        FetchState::Loading => println!("Fetching the photo listing..."),
        FetchState::Success(photos) => {
            println!("{} photos:", photos.len());
            for photo in photos {
                println!("{:>10}  {}", photo.id, photo.img_src);
            }
        }
        FetchState::Error => println!("The photo listing could not be fetched."),
    }
}
