pub const ROOT_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Spotify Relay</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 600px; margin: 50px auto; padding: 20px; }
    .container { text-align: center; }
    .button { display: inline-block; padding: 10px 20px; background: #1db954; color: white; text-decoration: none; border-radius: 5px; margin: 10px; }
  </style>
</head>
<body>
  <div class="container">
    <h1>Spotify Relay</h1>
    <p>Your personal Spotify relay is running!</p>
    <a href="/setup" class="button">Setup OAuth</a>
    <a href="/health" class="button">Health Check</a>
  </div>
</body>
</html>
"#;

pub const SUCCESS_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>OAuth Success</title></head>
<body style="font-family: Arial, sans-serif; text-align: center; padding: 50px;">
  <h1>OAuth Setup Complete!</h1>
  <p>Your Spotify account has been successfully connected.</p>
  <p>You can now use the API endpoints:</p>
  <ul style="display: inline-block; text-align: left;">
    <li><a href="/now-playing">/now-playing</a></li>
    <li><a href="/recent">/recent</a></li>
    <li><a href="/health">/health</a></li>
  </ul>
  <p><a href="/">&larr; Back to Home</a></p>
</body>
</html>
"#;

const SETUP_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Spotify Relay Setup</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 600px; margin: 50px auto; padding: 20px; background-color: #f5f5f5; }
    .container { background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
    .button { display: inline-block; padding: 12px 24px; background: #1db954; color: white; border: none; border-radius: 25px; margin: 10px 0; cursor: pointer; font-size: 16px; }
    .button:hover { background: #1ed760; }
    .info { background: #e8f5e8; padding: 15px; border-radius: 5px; margin: 20px 0; }
    .step { margin: 15px 0; padding: 10px; background: #f9f9f9; border-left: 4px solid #1db954; }
  </style>
</head>
"#;

/// Renders the setup page; `redirect_uri` is shown so the user can register
/// it with their Spotify app.
pub fn setup_html(redirect_uri: &str) -> String {
    format!(
        r#"{head}<body>
  <div class="container">
    <h1>Spotify Relay Setup</h1>

    <div class="info">
      <h3>Before you begin:</h3>
      <ol>
        <li>Create a Spotify app at <a href="https://developer.spotify.com/dashboard" target="_blank">developer.spotify.com</a></li>
        <li>Add this callback URL to your app: <code>{redirect_uri}</code></li>
        <li>Set SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET for the relay</li>
      </ol>
    </div>

    <div class="step">
      <h3>Step 1: Authorize with Spotify</h3>
      <p>Click the button below to connect your Spotify account:</p>
      <form method="POST" action="/setup">
        <button type="submit" class="button">Connect Spotify Account</button>
      </form>
    </div>

    <div class="step">
      <h3>Step 2: Test Your Setup</h3>
      <p>After authorization, test these endpoints:</p>
      <ul>
        <li><a href="/now-playing">/now-playing</a> - Current track</li>
        <li><a href="/recent">/recent</a> - Recent tracks</li>
        <li><a href="/health">/health</a> - Health check</li>
      </ul>
    </div>

    <p><a href="/">&larr; Back to Home</a></p>
  </div>
</body>
</html>
"#,
        head = SETUP_HEAD,
        redirect_uri = html_escape(redirect_uri),
    )
}

// The redirect URI may come from the Host header.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_page_shows_escaped_callback_url() {
        let html = setup_html("http://evil<script>/callback");
        assert!(html.contains("http://evil&lt;script&gt;/callback"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"<form method="POST" action="/setup">"#));
    }
}
