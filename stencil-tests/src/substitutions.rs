use crate::{ident, string};
use stencil::{Arg, Driver, args, map};

pub fn substitutions<D: Driver>(driver: &D) {
    let mut translator = driver.translator();
    translator.substitute("blog", "wp_").substitute("shop", "s1.");
    let translate = |args: &[Arg]| translator.translate(args).expect("Failed to translate");

    assert_eq!(
        translate(&args!["SELECT * FROM [blog:posts]"]),
        format!("SELECT * FROM {}", ident(&translator, "wp_posts"))
    );
    assert_eq!(
        translate(&args!["SELECT * FROM %n", "shop:orders"]),
        format!("SELECT * FROM {}", ident(&translator, "s1.orders"))
    );
    assert_eq!(
        translate(&args!["UPDATE t SET ", map! { "blog:title%s" => "x" }]),
        format!(
            "UPDATE t SET {} = {}",
            ident(&translator, "wp_title"),
            string(&translator, "x")
        )
    );
    // Unknown prefixes are left alone
    assert_eq!(
        translate(&args!["SELECT * FROM `news:posts`"]),
        format!("SELECT * FROM {}", ident(&translator, "news:posts"))
    );
    // Literals are never substituted
    assert_eq!(
        translate(&args!["SELECT 'blog:posts'"]),
        format!("SELECT {}", string(&translator, "blog:posts"))
    );
}
