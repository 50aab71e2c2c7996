use caption_overlay::{decode_caption, CaptionStyle, Compositor};

fn main() {
    // usage: caption <image> <caption file> [style.yaml]
    let mut args = std::env::args().skip(1);
    let image = args.next().expect("an image path");
    let caption = std::fs::read(args.next().expect("a caption file")).expect("can read caption");
    let style = match args.next() {
        Some(path) => CaptionStyle::from_path(path).expect("can load style"),
        None => CaptionStyle::default(),
    };

    let compositor =
        Compositor::from_font_path("./assets/DejaVuSans.ttf", style).expect("can load font");
    let caption = decode_caption(&caption).expect("caption is UTF-8");
    let captioned = compositor
        .composite_path(&image, caption)
        .expect("can caption image");

    captioned.save("captioned.png").expect("can save image");
}
