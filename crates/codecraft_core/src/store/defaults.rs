//! Bundled fallback content and the mock credential registry.
//!
//! # Responsibility
//! - Provide the default article set used when durable storage is empty
//!   or unparsable.
//! - Provide the seed accounts the identity store authenticates against.
//!
//! # Invariants
//! - Default article ids are stable; favorites recorded against them must
//!   keep resolving across restarts.

use crate::model::article::Article;
use crate::model::user::UserAccount;
use chrono::NaiveDate;

const LARAVEL_CONTENT: &str = r#"<p>Laravel merupakan framework PHP modern yang sangat populer di kalangan developer. Jika Anda baru memulai perjalanan web development, Laravel adalah pilihan tepat karena kemudahan penggunaannya.</p>

<h2>Apa itu Laravel?</h2>

<p>Laravel adalah framework PHP open-source yang dirilis pertama kali pada tahun 2011 oleh Taylor Otwell. Framework ini mengadopsi pola arsitektur MVC (Model-View-Controller) yang membantu mengorganisir kode dengan lebih terstruktur.</p>

<p>Beberapa keunggulan Laravel:</p>
<ul>
    <li>Sintaks yang elegan dan ekspresif</li>
    <li>Dokumentasi yang sangat lengkap</li>
    <li>Komunitas besar dan aktif</li>
    <li>Banyak package pendukung (Laravel Ecosystem)</li>
</ul>

<h2>Menginstall Laravel</h2>

<p>Install Laravel installer global dengan Composer:</p>
<pre><code>composer global require laravel/installer</code></pre>
<p>Kemudian buat project baru:</p>
<pre><code>laravel new nama-project</code></pre>

<h2>Membuat Aplikasi Pertama</h2>

<p>Buka file <code>routes/web.php</code> dan tambahkan route baru:</p>
<pre><code>Route::get('/hello', function () {
    return 'Hello World!';
});</code></pre>
<p>Jalankan server dengan <code>php artisan serve</code> dan buka <code>http://localhost:8000/hello</code></p>

<h2>Kesimpulan</h2>

<p>Laravel adalah framework yang sempurna untuk memulai pengembangan web modern. Mulailah dengan project sederhana, pahami konsep dasar MVC, routing, dan Eloquent ORM.</p>

<p>Selamat belajar dan happy coding!</p>"#;

const REACT_HOOKS_CONTENT: &str = r#"<h2>Apa itu React Hooks?</h2>
<p>React Hooks adalah fungsi yang memungkinkan Anda "mengaitkan" state dan fitur lifecycle React dari komponen fungsional...</p>

<h3>useState</h3>
<p>Hook <code>useState</code> digunakan untuk menambahkan state lokal ke komponen fungsional...</p>
<pre><code>import { useState } from 'react';

function Counter() {
  const [count, setCount] = useState(0);
  return (
    &lt;button onClick={() =&gt; setCount(count + 1)}&gt;
      You clicked {count} times
    &lt;/button&gt;
  );
}
</code></pre>

<h3>useEffect</h3>
<p>Hook <code>useEffect</code> memungkinkan Anda melakukan efek samping dalam komponen fungsional. Ini adalah kombinasi dari <code>componentDidMount</code>, <code>componentDidUpdate</code>, dan <code>componentWillUnmount</code> dalam komponen kelas.</p>"#;

/// Default article set used when storage is empty or unparsable.
pub fn default_articles() -> Vec<Article> {
    vec![
        Article {
            id: "laravel-panduan-lengkap-pemula".to_string(),
            title: "Laravel untuk Pemula: Panduan Lengkap dari Dasar hingga Membuat Aplikasi"
                .to_string(),
            author: "Admin CodeCraft Indo".to_string(),
            author_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 6, 18).unwrap_or_default(),
            tags: ["laravel", "web development", "pemula", "php", "tutorial", "crud"]
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            content: LARAVEL_CONTENT.to_string(),
        },
        Article {
            id: "react-hooks-dasar".to_string(),
            title: "Pengenalan React Hooks: useState dan useEffect".to_string(),
            author: "Jane Smith".to_string(),
            author_id: 2,
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default(),
            tags: ["react", "frontend", "pemula"]
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            content: REACT_HOOKS_CONTENT.to_string(),
        },
    ]
}

/// Seed accounts for the mock credential registry.
pub fn default_registry() -> Vec<UserAccount> {
    vec![
        UserAccount::with_password(
            1,
            "Admin CodeCraft Indo",
            "admin@codecraftindo.com",
            "password123",
            "seed-admin",
        ),
        UserAccount::with_password(
            2,
            "Jane Smith",
            "jane@codecraftindo.com",
            "janesmith",
            "seed-jane",
        ),
    ]
}
