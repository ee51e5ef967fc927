pub fn health_html() -> &'static str {
    r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Advisor Health</title>
    <link
      href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
      rel="stylesheet"
      integrity="sha384-QWTKZyjpPEjISv5WaRU9OFeRpok6YctnYmDr5pNlyT2bRjXh0JMhjY6hW+ALEwIH"
      crossorigin="anonymous"
    >
    <link href="/web/css/advisor.css" rel="stylesheet">
  </head>
  <body>
    <div class="container py-4">
      <div class="advisor-panel p-4">
        <h1 class="mb-3">Advisor</h1>
        <p class="text-muted">Status: ok</p>
        <button class="btn btn-advisor-primary" id="check">Check backend</button>
        <h2 class="mt-4">Backend</h2>
        <pre class="advisor-log p-3" id="output">Not checked yet.</pre>
      </div>
    </div>
    <script>
      const output = document.getElementById('output');
      document.getElementById('check').addEventListener('click', async () => {
        output.textContent = 'Checking...';
        try {
          const response = await fetch('/api/health');
          const data = await response.json();
          output.textContent = JSON.stringify(data, null, 2);
        } catch (error) {
          output.textContent = 'Error: ' + error;
        }
      });
    </script>
  </body>
</html>
"#
}
