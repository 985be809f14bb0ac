//! Server-rendered HTML for every route.
//!
//! Pages are composed as plain strings around a shared layout. Everything
//! that came from the content document or from user input goes through
//! `escape_html` before it is interpolated.

use crate::contact::ContactSubmission;
use crate::content::{Course, SiteContent};
use crate::i18n::Locale;
use crate::links::{self, ThumbnailQuality};
use chrono::{Datelike, Utc};

/// Outcome banner shown on the contact page after a POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Sent,
    Failed,
}

/// Escape text for interpolation into HTML element content or attribute
/// values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Pick the inline string for the current locale.
///
/// For the handful of small labels the content document doesn't carry
/// (button captions, section headings), matching how the original site
/// inlined both variants at the call site.
fn tr<'a>(locale: Locale, id_text: &'a str, en_text: &'a str) -> &'a str {
    match locale {
        Locale::Id => id_text,
        Locale::En => en_text,
    }
}

/// Href that keeps the reader on `path` but in the given locale.
fn localized_href(path: &str, locale: Locale) -> String {
    format!("{}?lang={}", path, locale.code())
}

fn stars_markup(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

// ==================== Shared Layout ====================

/// Wrap a page body in the shared document shell: head, header navigation
/// with the locale toggle, and footer.
fn layout(content: &SiteContent, locale: Locale, path: &str, title: &str, body: &str) -> String {
    let nav = content.navigation.get(locale);
    let nav_items = [
        ("/", nav.home.as_str()),
        ("/courses", nav.courses.as_str()),
        ("/pricing", nav.pricing.as_str()),
        ("/about", nav.about.as_str()),
        ("/testimonials", nav.testimonials.as_str()),
        ("/contact", nav.contact.as_str()),
    ];

    let mut nav_links = String::new();
    for (href, label) in nav_items {
        let class = if href == path { "nav-link active" } else { "nav-link" };
        nav_links.push_str(&format!(
            r#"<a class="{}" href="{}">{}</a>"#,
            class,
            localized_href(href, locale),
            escape_html(label)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{meta_description}">
<title>{title} | {site_title}</title>
</head>
<body>
<header>
<nav>
<a class="brand" href="{home_href}"><img src="{logo}" alt="{site_title}"><span>{site_title}</span></a>
{nav_links}
<a class="lang-toggle" href="{toggle_href}" aria-label="Toggle language">{toggle_label}</a>
<a class="cta" href="{contact_href}">{register_label}</a>
</nav>
</header>
<main>
{body}
</main>
{footer}
</body>
</html>"#,
        lang = locale.code(),
        meta_description = escape_html(content.site.meta_description.resolve(locale)),
        title = escape_html(title),
        site_title = escape_html(&content.site.title),
        home_href = localized_href("/", locale),
        logo = escape_html(&content.site.logo),
        nav_links = nav_links,
        toggle_href = localized_href(path, locale.toggle()),
        toggle_label = locale.toggle_label(),
        contact_href = localized_href("/contact", locale),
        register_label = tr(locale, "Daftar Sekarang", "Register Now"),
        body = body,
        footer = footer(content, locale),
    )
}

fn footer(content: &SiteContent, locale: Locale) -> String {
    let nav = content.navigation.get(locale);
    let settings = &content.settings;
    let hours = settings.business_hours.get(locale);

    let mut course_links = String::new();
    for course in &content.courses {
        course_links.push_str(&format!(
            r#"<li><a href="{}">{}</a></li>"#,
            localized_href(&format!("/courses/{}", course.slug), locale),
            escape_html(course.title.resolve(locale))
        ));
    }

    format!(
        r#"<footer>
<div class="footer-contact">
<p class="address">{address}</p>
<p><a href="{tel}">{phone}</a></p>
<p><a href="{mailto}">{email}</a></p>
<p><a href="{wa}">WhatsApp</a></p>
</div>
<div class="footer-links">
<h4>{courses_heading}</h4>
<ul>{course_links}</ul>
<h4>{info_heading}</h4>
<ul>
<li><a href="{about_href}">{about_label}</a></li>
<li><a href="{pricing_href}">{pricing_label}</a></li>
<li><a href="{testimonials_href}">{testimonials_label}</a></li>
</ul>
</div>
<div class="footer-hours">
<h4>{hours_heading}</h4>
<p>{weekdays}</p>
<p>{saturday}</p>
<p>{sunday}</p>
</div>
<div class="footer-social">
<a href="{facebook}">Facebook</a>
<a href="{instagram}">Instagram</a>
<a href="{youtube}">YouTube</a>
</div>
<p class="copyright">&copy; {year} {site_title}</p>
</footer>"#,
        address = escape_html(settings.address.resolve(locale)),
        tel = escape_html(&links::tel_url(&settings.phone)),
        phone = escape_html(&settings.phone),
        mailto = escape_html(&links::mailto_url(&settings.contact_email)),
        email = escape_html(&settings.contact_email),
        wa = escape_html(&links::whatsapp_url(&settings.whatsapp, "")),
        courses_heading = escape_html(&nav.courses),
        course_links = course_links,
        info_heading = tr(locale, "Informasi", "Information"),
        about_href = localized_href("/about", locale),
        about_label = escape_html(&nav.about),
        pricing_href = localized_href("/pricing", locale),
        pricing_label = escape_html(&nav.pricing),
        testimonials_href = localized_href("/testimonials", locale),
        testimonials_label = escape_html(&nav.testimonials),
        hours_heading = tr(locale, "Jam Operasional", "Business Hours"),
        weekdays = escape_html(&hours.weekdays),
        saturday = escape_html(&hours.saturday),
        sunday = escape_html(&hours.sunday),
        facebook = escape_html(&settings.social_media.facebook),
        instagram = escape_html(&settings.social_media.instagram),
        youtube = escape_html(&settings.social_media.youtube),
        year = Utc::now().year(),
        site_title = escape_html(&content.site.title),
    )
}

fn course_card(course: &Course, locale: Locale) -> String {
    format!(
        r#"<article class="course-card">
<h3><a href="{href}">{title}</a></h3>
<p class="tags">{level} &middot; {age_group} &middot; {duration}</p>
<p>{short_description}</p>
<p class="price">{price}</p>
</article>"#,
        href = localized_href(&format!("/courses/{}", course.slug), locale),
        title = escape_html(course.title.resolve(locale)),
        level = escape_html(&course.level),
        age_group = escape_html(&course.age_group),
        duration = escape_html(&course.duration),
        short_description = escape_html(course.short_description.resolve(locale)),
        price = escape_html(&course.price_display),
    )
}

// ==================== Pages ====================

pub fn home(content: &SiteContent, locale: Locale) -> String {
    let homepage = content.homepage.get(locale);
    let hero = &homepage.hero;
    let why = &homepage.why_choose_us;

    let mut features = String::new();
    for feature in &why.features {
        features.push_str(&format!(
            r#"<div class="feature"><h3>{}</h3><p>{}</p></div>"#,
            escape_html(&feature.title),
            escape_html(&feature.description)
        ));
    }

    let mut courses = String::new();
    for course in &content.courses {
        courses.push_str(&course_card(course, locale));
    }

    let body = format!(
        r#"<section class="hero">
<h1>{hero_title}</h1>
<p>{hero_subtitle}</p>
<a class="cta" href="{primary_href}">{cta_primary}</a>
<a class="cta secondary" href="{secondary_href}">{cta_secondary}</a>
<img src="{hero_image}" alt="">
</section>
<section class="why-us">
<h2>{why_title}</h2>
<p>{why_subtitle}</p>
{features}
</section>
<section class="courses-preview">
<h2>{courses_heading}</h2>
{courses}
</section>"#,
        hero_title = escape_html(&hero.title),
        hero_subtitle = escape_html(&hero.subtitle),
        primary_href = localized_href("/contact", locale),
        cta_primary = escape_html(&hero.cta_primary),
        secondary_href = localized_href("/courses", locale),
        cta_secondary = escape_html(&hero.cta_secondary),
        hero_image = escape_html(&hero.hero_image),
        why_title = escape_html(&why.title),
        why_subtitle = escape_html(&why.subtitle),
        features = features,
        courses_heading = escape_html(&content.navigation.get(locale).courses),
        courses = courses,
    );

    layout(content, locale, "/", &content.navigation.get(locale).home, &body)
}

pub fn courses(content: &SiteContent, locale: Locale) -> String {
    let mut cards = String::new();
    for course in &content.courses {
        cards.push_str(&course_card(course, locale));
    }

    let body = format!(
        r#"<section class="course-list">
<h1>{heading}</h1>
{cards}
</section>"#,
        heading = escape_html(&content.navigation.get(locale).courses),
        cards = cards,
    );

    layout(
        content,
        locale,
        "/courses",
        &content.navigation.get(locale).courses,
        &body,
    )
}

pub fn course_detail(content: &SiteContent, locale: Locale, course: &Course) -> String {
    let title = course.title.resolve(locale);
    let nav = content.navigation.get(locale);

    let mut bullets = String::new();
    for bullet in &course.bullets {
        bullets.push_str(&format!("<li>{}</li>", escape_html(bullet.resolve(locale))));
    }

    let video = match &course.video_url {
        Some(url) => match links::youtube_video_id(url) {
            Some(id) => format!(
                r#"<div class="video"><iframe src="https://www.youtube.com/embed/{id}" title="{title}" allowfullscreen></iframe></div>"#,
                id = id,
                title = escape_html(title),
            ),
            None => format!(
                r#"<img class="video-placeholder" src="{}" alt="">"#,
                links::youtube_thumbnail(url, ThumbnailQuality::HqDefault)
            ),
        },
        None => String::new(),
    };

    // Prefilled WhatsApp enquiry naming the course the visitor is reading.
    let wa_message = match locale {
        Locale::Id => format!(
            "Halo, saya tertarik dengan kursus \"{}\". Bisakah saya mendapatkan informasi lebih lanjut?",
            title
        ),
        Locale::En => format!(
            "Hello, I am interested in the \"{}\" course. Can I get more information?",
            title
        ),
    };
    let wa_href = links::whatsapp_url(&content.settings.whatsapp, &wa_message);

    let body = format!(
        r#"<nav class="breadcrumb">
<a href="{home_href}">{home_label}</a> / <a href="{courses_href}">{courses_label}</a> / <span>{title}</span>
</nav>
<section class="course-detail">
<span class="level">{level}</span>
<h1>{title}</h1>
<p class="lead">{short_description}</p>
<p class="tags">{age_group} &middot; {duration}</p>
<p class="price">{price}</p>
{video}
<div class="description">{long_description}</div>
<h2>{includes_heading}</h2>
<ul class="bullets">{bullets}</ul>
<h2>{schedule_heading}</h2>
<p>{schedule}</p>
<a class="cta" href="{wa_href}">{wa_label}</a>
<a class="cta secondary" href="{contact_href}">{register_label}</a>
</section>"#,
        home_href = localized_href("/", locale),
        home_label = escape_html(&nav.home),
        courses_href = localized_href("/courses", locale),
        courses_label = escape_html(&nav.courses),
        title = escape_html(title),
        level = escape_html(&course.level),
        short_description = escape_html(course.short_description.resolve(locale)),
        age_group = escape_html(&course.age_group),
        duration = escape_html(&course.duration),
        price = escape_html(&course.price_display),
        video = video,
        long_description = escape_html(course.long_description.resolve(locale)),
        includes_heading = tr(locale, "Yang Anda Dapatkan", "What You Get"),
        bullets = bullets,
        schedule_heading = tr(locale, "Jadwal", "Schedule"),
        schedule = escape_html(course.schedule.resolve(locale)),
        wa_href = escape_html(&wa_href),
        wa_label = tr(locale, "Tanya via WhatsApp", "Ask via WhatsApp"),
        contact_href = localized_href("/contact", locale),
        register_label = tr(locale, "Daftar Sekarang", "Register Now"),
    );

    layout(
        content,
        locale,
        &format!("/courses/{}", course.slug),
        title,
        &body,
    )
}

pub fn course_not_found(content: &SiteContent, locale: Locale) -> String {
    let body = format!(
        r#"<section class="not-found">
<h1>{heading}</h1>
<a class="cta" href="{back_href}">{back_label}</a>
</section>"#,
        heading = tr(locale, "Kursus tidak ditemukan", "Course not found"),
        back_href = localized_href("/courses", locale),
        back_label = tr(locale, "Kembali ke Kursus", "Back to Courses"),
    );

    layout(
        content,
        locale,
        "/courses",
        tr(locale, "Kursus tidak ditemukan", "Course not found"),
        &body,
    )
}

pub fn pricing(content: &SiteContent, locale: Locale) -> String {
    let mut packages = String::new();
    for (index, course) in content.courses.iter().enumerate() {
        // The middle package gets the highlight, as on the original site.
        let popular = index == 1;

        let badge = if popular {
            format!(
                r#"<span class="badge">{}</span>"#,
                tr(locale, "Paling Populer", "Most Popular")
            )
        } else {
            String::new()
        };

        let mut bullets = String::new();
        for bullet in &course.bullets {
            bullets.push_str(&format!("<li>{}</li>", escape_html(bullet.resolve(locale))));
        }

        packages.push_str(&format!(
            r#"<div class="package{popular_class}">
{badge}
<h3>{title}</h3>
<p>{age_group}</p>
<p class="price">{price}</p>
<ul>{bullets}</ul>
<a class="cta" href="{detail_href}">{detail_label}</a>
</div>"#,
            popular_class = if popular { " popular" } else { "" },
            badge = badge,
            title = escape_html(course.title.resolve(locale)),
            age_group = escape_html(&course.age_group),
            price = escape_html(&course.price_display),
            bullets = bullets,
            detail_href = localized_href(&format!("/courses/{}", course.slug), locale),
            detail_label = tr(locale, "Lihat Detail", "View Details"),
        ));
    }

    let body = format!(
        r#"<section class="pricing">
<h1>{heading}</h1>
<p>{subtitle}</p>
{packages}
</section>"#,
        heading = tr(
            locale,
            "Pilih Paket yang Tepat untuk Anda",
            "Choose the Right Package for You"
        ),
        subtitle = tr(
            locale,
            "Semua paket sudah termasuk sertifikat resmi.",
            "All packages include official certificates."
        ),
        packages = packages,
    );

    layout(
        content,
        locale,
        "/pricing",
        &content.navigation.get(locale).pricing,
        &body,
    )
}

pub fn about(content: &SiteContent, locale: Locale) -> String {
    let page = content.about.get(locale);

    let mut values = String::new();
    for value in &page.values {
        values.push_str(&format!(
            r#"<div class="value"><h3>{}</h3><p>{}</p></div>"#,
            escape_html(&value.title),
            escape_html(&value.description)
        ));
    }

    let mut stats = String::new();
    for stat in &page.stats {
        stats.push_str(&format!(
            r#"<div class="stat"><strong>{}</strong><span>{}</span></div>"#,
            escape_html(&stat.value),
            escape_html(&stat.label)
        ));
    }

    let body = format!(
        r#"<section class="about">
<h1>{title}</h1>
<p class="lead">{subtitle}</p>
<p>{description}</p>
<h2>{mission_heading}</h2>
<p>{mission}</p>
<h2>{vision_heading}</h2>
<p>{vision}</p>
<div class="values">{values}</div>
<div class="stats">{stats}</div>
</section>"#,
        title = escape_html(&page.title),
        subtitle = escape_html(&page.subtitle),
        description = escape_html(&page.description),
        mission_heading = tr(locale, "Misi Kami", "Our Mission"),
        mission = escape_html(&page.mission),
        vision_heading = tr(locale, "Visi Kami", "Our Vision"),
        vision = escape_html(&page.vision),
        values = values,
        stats = stats,
    );

    layout(
        content,
        locale,
        "/about",
        &content.navigation.get(locale).about,
        &body,
    )
}

pub fn testimonials(content: &SiteContent, locale: Locale) -> String {
    let mut cards = String::new();
    for testimonial in &content.testimonials {
        // Testimonials are keyed to courses by stable id; a dangling key
        // simply drops the course label instead of mislabeling the quote.
        let course_label = content
            .course_by_id(&testimonial.course_id)
            .map(|course| {
                format!(
                    r#"<p class="course">{}</p>"#,
                    escape_html(course.title.resolve(locale))
                )
            })
            .unwrap_or_default();

        let photo = testimonial
            .photo_url
            .as_deref()
            .map(|url| format!(r#"<img src="{}" alt="">"#, escape_html(url)))
            .unwrap_or_default();

        cards.push_str(&format!(
            r#"<figure class="testimonial">
{photo}
<blockquote>{quote}</blockquote>
<p class="stars" aria-label="{rating} / 5">{stars}</p>
<figcaption>{name}, {role}</figcaption>
{course_label}
</figure>"#,
            photo = photo,
            quote = escape_html(testimonial.text.resolve(locale)),
            rating = testimonial.stars(),
            stars = stars_markup(testimonial.rating),
            name = escape_html(&testimonial.name),
            role = escape_html(&testimonial.role),
            course_label = course_label,
        ));
    }

    let body = format!(
        r#"<section class="testimonials">
<h1>{heading}</h1>
{cards}
</section>"#,
        heading = escape_html(&content.navigation.get(locale).testimonials),
        cards = cards,
    );

    layout(
        content,
        locale,
        "/testimonials",
        &content.navigation.get(locale).testimonials,
        &body,
    )
}

pub fn contact(
    content: &SiteContent,
    locale: Locale,
    status: Option<FormStatus>,
    form: &ContactSubmission,
) -> String {
    let page = content.contact.get(locale);
    let fields = &page.form_fields;
    let settings = &content.settings;

    let banner = match status {
        Some(FormStatus::Sent) => format!(
            r#"<div class="banner success">{}</div>"#,
            escape_html(&page.success_message)
        ),
        Some(FormStatus::Failed) => format!(
            r#"<div class="banner error">{}</div>"#,
            escape_html(&page.error_message)
        ),
        None => String::new(),
    };

    let mut course_options = format!(
        r#"<option value="">{}</option>"#,
        tr(locale, "Pilih kursus...", "Select course...")
    );
    for course in &content.courses {
        let title = course.title.resolve(locale);
        let selected = if form.course == title { " selected" } else { "" };
        course_options.push_str(&format!(
            r#"<option value="{value}"{selected}>{value}</option>"#,
            value = escape_html(title),
            selected = selected,
        ));
    }

    let body = format!(
        r#"<section class="contact">
<h1>{title}</h1>
<p class="lead">{subtitle}</p>
{banner}
<h2>{form_title}</h2>
<form method="post" action="{form_action}">
<label for="name">{name_label} *</label>
<input type="text" id="name" name="name" required value="{name_value}">
<label for="email">{email_label} *</label>
<input type="email" id="email" name="email" required value="{email_value}">
<label for="phone">{phone_label}</label>
<input type="tel" id="phone" name="phone" value="{phone_value}">
<label for="course">{course_label}</label>
<select id="course" name="course">{course_options}</select>
<label for="message">{message_label} *</label>
<textarea id="message" name="message" rows="5" required placeholder="{message_placeholder}">{message_value}</textarea>
<button type="submit">{submit_label}</button>
</form>
<p>{direct_heading}</p>
<p><a href="{tel}">{phone}</a> &middot; <a href="{mailto}">{email}</a> &middot; <a href="{wa}">WhatsApp</a></p>
<h2>{hours_heading}</h2>
<p>{weekdays}</p>
<p>{saturday}</p>
<p>{sunday}</p>
</section>"#,
        title = escape_html(&page.title),
        subtitle = escape_html(&page.subtitle),
        banner = banner,
        form_title = escape_html(&page.form_title),
        form_action = localized_href("/contact", locale),
        name_label = escape_html(&fields.name),
        name_value = escape_html(&form.name),
        email_label = escape_html(&fields.email),
        email_value = escape_html(&form.email),
        phone_label = escape_html(&fields.phone),
        phone_value = escape_html(&form.phone),
        course_label = escape_html(&fields.course),
        course_options = course_options,
        message_label = escape_html(&fields.message),
        message_placeholder = tr(
            locale,
            "Ceritakan kepada kami tentang kebutuhan belajar Anda...",
            "Tell us about your learning needs..."
        ),
        message_value = escape_html(&form.message),
        submit_label = escape_html(&page.submit_button),
        direct_heading = tr(
            locale,
            "Atau hubungi kami langsung melalui:",
            "Or contact us directly via:"
        ),
        tel = escape_html(&links::tel_url(&settings.phone)),
        phone = escape_html(&settings.phone),
        mailto = escape_html(&links::mailto_url(&settings.contact_email)),
        email = escape_html(&settings.contact_email),
        wa = escape_html(&links::whatsapp_url(&settings.whatsapp, "")),
        hours_heading = tr(locale, "Jam Operasional", "Business Hours"),
        weekdays = escape_html(&settings.business_hours.get(locale).weekdays),
        saturday = escape_html(&settings.business_hours.get(locale).saturday),
        sunday = escape_html(&settings.business_hours.get(locale).sunday),
    );

    layout(
        content,
        locale,
        "/contact",
        &content.navigation.get(locale).contact,
        &body,
    )
}
